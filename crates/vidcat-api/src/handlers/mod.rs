pub mod media_list;
pub mod media_upload;
