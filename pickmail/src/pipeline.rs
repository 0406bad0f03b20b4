//! The pick run: load, select, mask, write.

use slog::{debug, info, warn, Logger};

use crate::{
    load_addresses, slog::IntoMaskedJson, write_addresses, EmailMaskPolicy, PickConfig,
    PickError, PickReport, Selector,
};

/// Runs one pick.
///
/// Masking is for display only: the report and the log records carry masked
/// addresses, while the output file receives the selection as loaded. The
/// output file is written last, so any earlier failure leaves it untouched.
pub fn run(
    config: &PickConfig,
    selector: &mut Selector,
    logger: &Logger,
) -> Result<PickReport, PickError> {
    let addresses = load_addresses(&config.input)?;
    let total = addresses.len();
    info!(logger, "loaded addresses";
        "path" => %config.input.display(),
        "count" => total);

    let policy = EmailMaskPolicy::new().with_mask_char(config.mask_char);
    let enrolled = config.list_all.then(|| policy.mask_all(&addresses));

    let picked = selector.pick(addresses, config.count);
    if picked.len() < config.count {
        warn!(logger, "fewer addresses than requested";
            "requested" => config.count,
            "available" => total);
    }
    debug!(logger, "picked addresses";
        "addresses" => picked.as_slice().into_masked_json(&policy));

    write_addresses(&config.output, &picked)?;
    info!(logger, "selection written";
        "path" => %config.output.display(),
        "count" => picked.len());

    Ok(PickReport {
        total,
        enrolled,
        picked: policy.mask_all(&picked),
        requested: config.count,
        output: config.output.clone(),
    })
}
