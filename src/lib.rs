// SPDX-License-Identifier: MPL-2.0
//! `iced_qr` is a small QR code generator built with the Iced GUI framework.
//!
//! It renders QR symbols with configurable colors, gradients, and error
//! correction, exports them as PNG or SVG, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_qr/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod qr;
pub mod ui;
