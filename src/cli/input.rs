//! Layered metadata input for CLI commands.

use anyhow::Result;

use super::args::InputArgs;
use crate::config::{expand_path, load_meta_file};
use crate::meta::{
    Field, MetaRecord, RawMeta, example_raw, length_warnings, normalize, normalize_url,
};
use crate::share::load_shared_raw;
use crate::{debug, logger};

/// Merge every input source into raw fields.
///
/// Precedence, lowest first: example, config file, share link, flags. An
/// unusable share link is skipped so the remaining layers still apply.
pub fn collect_raw(args: &InputArgs) -> Result<RawMeta> {
    let mut raw = if args.example {
        example_raw()
    } else {
        RawMeta::default()
    };

    if let Some(path) = &args.config {
        raw = raw.overlay(load_meta_file(&expand_path(path))?);
    }

    if let Some(link) = &args.from {
        match load_shared_raw(link) {
            Some(shared) => raw = raw.overlay(shared),
            None => debug!("input"; "no usable shared config in --from, skipping"),
        }
    }

    Ok(raw.overlay(args.flags()))
}

/// Collect, normalize, and report length warnings.
pub fn resolve_record(args: &InputArgs) -> Result<MetaRecord> {
    let raw = collect_raw(args)?;
    for field in [Field::Canonical, Field::OgImage] {
        let url = normalize_url(raw.get(field));
        if !url.recognized && !url.value.is_empty() {
            debug!("input"; "`{}` is not an absolute URL, kept as typed: {}", field.key(), url.value);
        }
    }

    let record = normalize(&raw);
    for warning in length_warnings(&record) {
        logger::status_warning(&warning);
    }
    Ok(record)
}
