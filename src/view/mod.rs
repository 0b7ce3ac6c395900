//! Server-rendered explorer views.

pub mod html;
pub mod icons;
pub mod route_catalog_view;
pub mod route_detail_panel;
pub mod style;
