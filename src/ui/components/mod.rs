pub mod pricing_grid;
pub mod rate_toggle;
pub mod results_panel;
pub mod toast;
