mod locations_file;

pub use locations_file::{write_location_overview, LOCATIONS_FILE_NAME};
