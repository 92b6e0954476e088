//! plz-streets - Build a postal-code to street-name lookup around a shop from OpenStreetMap data

pub mod api;
pub mod config;
pub mod domain;
pub mod filter;
pub mod geometry;
pub mod osm;
pub mod output;
pub mod pipeline;
