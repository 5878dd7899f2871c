pub mod wave_renderer;
