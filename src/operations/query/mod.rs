mod volume;

pub use volume::MeshVolume;
