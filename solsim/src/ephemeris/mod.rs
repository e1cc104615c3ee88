pub mod horizons;
