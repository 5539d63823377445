mod bar_view;
mod bubble_view;
mod chart_geometry;
mod dashboard;
mod frame_player;
mod heatmap_view;
mod trend_view;

pub use dashboard::WageDashboard;
