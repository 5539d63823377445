pub mod d410_wage_dashboard;
