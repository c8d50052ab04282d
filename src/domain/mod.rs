pub mod archive;
pub mod download;
pub mod input_source;
pub mod object_url;
pub mod renderer;
