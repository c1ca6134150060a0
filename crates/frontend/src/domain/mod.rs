pub mod a001_artwork;
