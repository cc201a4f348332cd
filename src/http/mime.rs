//! MIME type table
//!
//! Maps file extensions to the Content-Type values the classroom pages
//! expect for documents, scripts, images, and the DASH/HLS streaming
//! formats.

/// Get the Content-Type for a file extension.
///
/// The extension includes the leading dot; matching is exact and
/// case-sensitive. Anything outside the table is served as a generic
/// binary stream.
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some(".html") => "text/html",
        Some(".js") => "text/javascript",
        Some(".css") => "text/css",
        Some(".json") => "application/json",
        Some(".png") => "image/png",
        Some(".jpg") => "image/jpg",
        Some(".gif") => "image/gif",
        Some(".svg") => "image/svg+xml",
        Some(".mp4") => "video/mp4",
        Some(".m4s") => "video/iso.segment",
        Some(".mpd") => "application/dash+xml",
        Some(".m3u8") => "application/vnd.apple.mpegurl",
        Some(".ts") => "video/MP2T",
        _ => "application/octet-stream",
    }
}

/// Extract the extension of `path`, dot included.
///
/// The extension runs from the last dot of the final path component; a
/// name whose only dot is the leading one has no extension. The path is
/// taken as-is, so a trailing query string becomes part of the result
/// and falls back to the binary type.
pub fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        None | Some(0) => None,
        Some(idx) => Some(&name[idx..]),
    }
}
