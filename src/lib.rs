//! CouponHub - Coupon Management Platform Backend
//!
//! This crate implements the server side of the CouponHub platform:
//! session lifecycle, subscription entitlements, Stripe billing glue,
//! and the public/loyalty/analytics HTTP surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
