//! Portrait plumbing: prompt building for AI generation and the manual
//! upload path.

use crate::catalog::{Character, Label};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io;
use std::path::Path;
use tokio::fs;

/// Build the generation prompt for a character from its name, kind, and
/// secondary names.
pub fn portrait_prompt<T, K: Label>(character: &Character<T, K>) -> String {
    let mut prompt = format!(
        "Retrato de {}, {} de la mitología",
        character.name,
        character.kind.label()
    );
    if !character.aliases.is_empty() {
        prompt.push_str(&format!(", también conocido como {}", character.aliases.join(", ")));
    }
    prompt.push_str(". Pintura clásica, iluminación dramática, fondo sobrio.");
    prompt
}

/// Read a local image file and encode it as an embeddable data URL.
///
/// This is the manual-upload path: the result replaces a character's image
/// reference directly, bypassing generation.
pub async fn read_file_as_data_url(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).await?;
    let media_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or("application/octet-stream", mime_for_extension);
    Ok(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
