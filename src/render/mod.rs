pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod svg;

pub use pipeline::{Mp4Opts, RenderStats, render_frame, render_to_mp4};
pub use raster::{FrameRGBA, Rasterizer, write_png};
pub use scene::{FilledPath, Scene, SceneOptions, TextItem, TextRole, build_scene};
pub use svg::scene_to_svg;
