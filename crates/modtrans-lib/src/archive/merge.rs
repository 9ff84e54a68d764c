//! Jar rewriting

use super::metadata::{find_mod_id, translation_entry_path};
use super::{InputFile, MergeError, MergedPackage, OUTPUT_SUFFIX};
use std::io::{Cursor, Write};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// `<stem>_translated.jar` for a jar named `<stem>.jar`
pub fn output_file_name(package_name: &str) -> String {
    let stem = package_name.strip_suffix(".jar").unwrap_or(package_name);
    format!("{stem}{OUTPUT_SUFFIX}.jar")
}

/// Checks presence, extensions and encoding before any archive work
pub fn validate_inputs<'a>(
    package: Option<&'a InputFile>,
    translation: Option<&'a InputFile>,
) -> Result<(&'a InputFile, &'a str), MergeError> {
    let (Some(package), Some(translation)) = (package, translation) else {
        return Err(MergeError::InvalidInput {
            reason: "Please select both files".to_string(),
        });
    };

    if !package.name.ends_with(".jar") {
        return Err(MergeError::InvalidInput {
            reason: format!("'{}' is not a .jar file", package.name),
        });
    }
    if !translation.name.ends_with(".json") {
        return Err(MergeError::InvalidInput {
            reason: format!("'{}' is not a .json file", translation.name),
        });
    }

    let text =
        std::str::from_utf8(&translation.contents).map_err(|_| MergeError::InvalidInput {
            reason: format!("'{}' is not UTF-8 text", translation.name),
        })?;

    Ok((package, text))
}

/// Merges `translation` into `package`, leaving both inputs untouched
pub fn merge(
    package: Option<&InputFile>,
    translation: Option<&InputFile>,
) -> Result<MergedPackage, MergeError> {
    let (package, text) = validate_inputs(package, translation)?;
    let mut merged = merge_bytes(&package.contents, text)?;
    merged.file_name = output_file_name(&package.name);

    info!(
        mod_id = %merged.mod_id,
        output = %merged.file_name,
        replaced = merged.replaced,
        "Merged translation"
    );
    Ok(merged)
}

/// Byte-level merge; `file_name` of the result is left empty
pub fn merge_bytes(package: &[u8], translation: &str) -> Result<MergedPackage, MergeError> {
    let mut archive = ZipArchive::new(Cursor::new(package))?;
    let mod_id = find_mod_id(&mut archive)?;
    let entry_path = translation_entry_path(&mod_id);
    debug!(%mod_id, entry = %entry_path, entries = archive.len(), "Rewriting archive");

    let mut writer = ZipWriter::new(Cursor::new(Vec::with_capacity(package.len())));
    let mut replaced = false;

    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        if entry.name() == entry_path {
            replaced = true;
            continue;
        }
        writer.raw_copy_file(entry)?;
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(entry_path.as_str(), options)?;
    writer.write_all(translation.as_bytes())?;
    let bytes = writer.finish()?.into_inner();

    Ok(MergedPackage {
        file_name: String::new(),
        mod_id,
        entry_path,
        replaced,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    include!("merge.test.rs");
}
