pub mod d410_wage_dashboard;

pub use d410_wage_dashboard::ui::WageDashboard;
