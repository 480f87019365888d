//! Test fixtures: fake MP4 payloads and multipart forms.

use axum_test::multipart::{MultipartForm, Part};

/// Bytes that start like an MP4 `ftyp` box, padded to `len`.
pub fn fake_mp4(len: usize) -> Vec<u8> {
    let header = [
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm',
    ];
    let mut data = header[..len.min(header.len())].to_vec();
    data.resize(len, 0xAB);
    data
}

pub fn mp4_part(file_name: &str, data: Vec<u8>) -> Part {
    Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_type("video/mp4")
}

/// Multipart form with every `(name, bytes)` pair under the `files` field.
pub fn files_form(files: Vec<(&str, Vec<u8>)>) -> MultipartForm {
    files
        .into_iter()
        .fold(MultipartForm::new(), |form, (name, data)| {
            form.add_part("files", mp4_part(name, data))
        })
}
