/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Round trips through real files in the temporary directory
use std::env::temp_dir;
use std::path::PathBuf;

use nanorand::Rng;
use zune_edit_bin::errors::EditErrors;
use zune_edit_bin::file_io::{ImageIo, ZuneFileIo};
use zune_edit_procs::buffer::ImageBuffer;
use zune_edit_procs::filter::Filter;
use zune_edit_procs::resize::resize;

fn scratch_path(name: &str) -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("zune-edit-test-{}-{name}", std::process::id()));
    path
}

fn random_image(width: usize, height: usize, channels: usize) -> ImageBuffer {
    let mut data = vec![0_u8; width * height * channels];
    nanorand::WyRand::new_seed(2023).fill(&mut data);
    ImageBuffer::new(width, height, channels, data).unwrap()
}

#[test]
fn png_round_trip() {
    let mut io = ZuneFileIo::default();

    for channels in [1, 3, 4] {
        let image = random_image(37, 21, channels);
        let path = scratch_path(&format!("round-trip-{channels}.png"));
        let path_str = path.to_str().unwrap();

        io.save(&image, path_str).unwrap();
        let loaded = io.load(path_str).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, image);
    }
}

#[test]
fn edited_image_is_saved_with_its_shape() {
    let mut io = ZuneFileIo::default();
    let image = random_image(100, 100, 3);

    let gray = Filter::Grayscale.apply(&image).unwrap();
    let small = resize(&gray, 50, 50).unwrap();

    let path = scratch_path("edited.png");
    let path_str = path.to_str().unwrap();

    io.save(&small, path_str).unwrap();
    let loaded = io.load(path_str).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.dimensions(), (50, 50));
    assert_eq!(loaded.channels(), 1);
}

#[test]
fn missing_and_garbage_files_fail_to_load() {
    let mut io = ZuneFileIo::default();

    let missing = scratch_path("does-not-exist.png");
    assert!(matches!(
        io.load(missing.to_str().unwrap()),
        Err(EditErrors::LoadFailure(_))
    ));

    let garbage = scratch_path("garbage.png");
    std::fs::write(&garbage, b"definitely not an image").unwrap();
    let result = io.load(garbage.to_str().unwrap());
    std::fs::remove_file(&garbage).unwrap();

    assert!(matches!(result, Err(EditErrors::LoadFailure(_))));
}

#[test]
fn unknown_extensions_fail_to_save() {
    let mut io = ZuneFileIo::default();
    let image = random_image(8, 8, 3);

    for name in ["image.unknown", "no-extension"] {
        let path = scratch_path(name);
        assert!(matches!(
            io.save(&image, path.to_str().unwrap()),
            Err(EditErrors::SaveFailure(_))
        ));
    }
}
