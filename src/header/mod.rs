mod header;

pub use header::ContainerHeader;
