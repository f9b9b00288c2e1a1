mod path;


pub use path::{InvalidName, SegmentNameSanitizer};
