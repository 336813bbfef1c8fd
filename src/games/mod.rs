pub mod sun_chaser;
