pub mod pack_file;
pub mod question;
