pub mod solsim_vis2d;
pub mod headless;
