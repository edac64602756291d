// SPDX-License-Identifier: MPL-2.0
use image_rs::{DynamicImage, GenericImageView};
use lens_crop::config::{self, Config};
use lens_crop::crop::{CropperSettings, CropperState, PixelRect, TouchTarget};
use lens_crop::domain::crop::Zone;
use lens_crop::domain::geometry::{Point, Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

/// 800×400 image in a 430×300 frame: with the overlay visible the viewport
/// is 400×200 at scale 0.5.
fn visible_cropper(settings: CropperSettings, crop: Option<Rect>) -> CropperState {
    let mut cropper = CropperState::new(settings);
    cropper.refresh(Size::new(430.0, 300.0));
    cropper.set_image(800, 400);
    cropper
        .show_overlay(crop, false)
        .expect("overlay should show");
    cropper
}

#[test]
fn settings_file_drives_cropper_touch_targets() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        finger_size: Some(44.0),
        min_crop_width: Some(50.0),
        min_crop_height: Some(50.0),
        max_zoom_scale: Some(4.0),
        show_overlay_on_load: Some(false),
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");

    let settings = CropperSettings::from_config(&loaded);
    assert_eq!(settings.finger_size.value(), 44.0);

    let cropper = visible_cropper(settings, Some(Rect::new(100.0, 50.0, 200.0, 100.0)));

    // Margin is half a finger.
    assert_eq!(cropper.layout().viewport.origin(), Point::new(22.0, 22.0));
    // A point 20 units outside the left edge is still within reach of a
    // 44 unit finger.
    assert_eq!(
        cropper.hit_test(Point::new(80.0, 100.0)),
        TouchTarget::CropHandle(Zone::LeftEdge)
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn drag_then_extract_cropped_pixels() {
    let mut cropper = visible_cropper(
        CropperSettings::default(),
        Some(Rect::new(100.0, 50.0, 200.0, 100.0)),
    );
    assert_eq!(cropper.layout().viewport, Rect::new(15.0, 15.0, 400.0, 200.0));

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    cropper.set_observer(move |rect| sink.borrow_mut().push(rect));

    let start = Point::new(300.0, 150.0);
    assert_eq!(cropper.touch_start(start), Zone::BottomRightCorner);
    let moved = cropper.touch_move(Point::new(350.0, 180.0), start);
    cropper.touch_end();

    let expected = Rect::new(100.0, 50.0, 250.0, 130.0);
    assert_eq!(moved, Some(expected));
    assert_eq!(changes.borrow().as_slice(), &[expected]);

    assert_eq!(cropper.pixel_rect(), PixelRect::new(200, 100, 500, 260));

    let image = DynamicImage::new_rgba8(800, 400);
    let cropped = cropper.cropped_image(&image).expect("crop should succeed");
    assert_eq!(cropped.dimensions(), (500, 260));
}

#[test]
fn drag_is_pinned_to_container_edges() {
    let mut cropper = visible_cropper(
        CropperSettings::default(),
        Some(Rect::new(100.0, 50.0, 200.0, 100.0)),
    );

    let start = Point::new(100.0, 50.0);
    assert_eq!(cropper.touch_start(start), Zone::TopLeftCorner);
    cropper.touch_move(Point::new(-500.0, -500.0), start);
    cropper.touch_end();

    let crop = cropper.crop_rect();
    assert_eq!(crop, Rect::new(0.0, 0.0, 300.0, 150.0));
    assert!(cropper.crop_bounds().x <= crop.x);
}

#[test]
fn dismissed_overlay_maps_whole_viewport() {
    let mut cropper = visible_cropper(
        CropperSettings::default(),
        Some(Rect::new(100.0, 50.0, 200.0, 100.0)),
    );

    cropper.dismiss_overlay(true).expect("dismiss should start");
    assert!(cropper.show_overlay(None, false).is_err());
    cropper.complete_transition();

    // Hidden: no margin, image fits 430×300 at scale 0.5375.
    let pixels = cropper.pixel_rect();
    assert_eq!((pixels.x, pixels.y), (0, 0));
    assert!(pixels.width >= 799 && pixels.width <= 800);
    assert!(pixels.height >= 399 && pixels.height <= 400);
}
