// SPDX-License-Identifier: MPL-2.0
//! `photo_deck` is a photo gallery viewer built with the Iced GUI framework.
//!
//! Photos are collected into a gallery through a native file picker or a
//! directory given on the command line, browsed as a thumbnail grid, and
//! opened full screen. The full-screen view carries a sliding panel that is
//! dragged open to reveal formatted camera (EXIF) metadata.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod metadata;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
