//! Channel factories.
//!
//! Each `add_*_chan` method issues exactly one native create-channel call
//! carrying the full typed parameter set, then wraps the (task handle,
//! assigned name) pair in a channel object. A non-zero error status means
//! no object is constructed. The driver is never re-queried to confirm the
//! assigned name; it is synthesized host-side by the rules below.

mod ai;
mod ao;
mod cio;
mod di;

pub use ai::{
    AIChannelCollection, AiBridgeChanOptions, AiCurrentChanOptions, AiResistanceChanOptions,
    AiRtdChanOptions, AiStrainGageChanOptions, AiThermocoupleChanOptions, AiThrmstrIexChanOptions,
    AiThrmstrVexChanOptions, AiVoltageChanOptions, AiVoltageIepeChanOptions,
};
pub use ao::{AOChannelCollection, AoCurrentChanOptions, AoVoltageChanOptions};
pub use cio::{
    CIOChannelCollection, CiAngEncoderChanOptions, CiCountEdgesChanOptions,
    CoPulseChanFreqOptions,
};
pub use di::DIChannelCollection;

use crate::constants::LineGrouping;
use crate::utils::unflatten_channel_string;

/// Virtual name the driver assigns for a create call.
///
/// An explicit name covering N>1 physical lines becomes `"{name}0:{N-1}"`;
/// covering one line it is used as-is; with no explicit name the physical
/// specifier itself becomes the channel name.
pub(crate) fn assigned_channel_name(physical_channel: &str, name_to_assign: &str) -> String {
    if name_to_assign.is_empty() {
        return physical_channel.to_owned();
    }
    let num_channels = unflatten_channel_string(physical_channel).len();
    if num_channels > 1 {
        format!("{name_to_assign}0:{}", num_channels - 1)
    } else {
        name_to_assign.to_owned()
    }
}

/// Digital-line variant of the naming rule. Grouping all lines into one
/// channel keeps the raw specifier (elided to `"{first}..."` when several
/// unnamed lines collapse into one channel); one channel per line follows
/// the ordinary rule.
pub(crate) fn assigned_line_name(
    lines: &str,
    name_to_assign: &str,
    line_grouping: LineGrouping,
) -> String {
    match line_grouping {
        LineGrouping::ChanForAllLines => {
            let unflattened = unflatten_channel_string(lines);
            if !name_to_assign.is_empty() || unflattened.len() <= 1 {
                lines.to_owned()
            } else {
                format!("{}...", unflattened[0])
            }
        }
        LineGrouping::ChanPerLine => assigned_channel_name(lines, name_to_assign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_over_a_range_gets_an_index_suffix() {
        assert_eq!(assigned_channel_name("dev1/ai0:3", "temp"), "temp0:3");
    }

    #[test]
    fn explicit_name_over_one_line_is_kept() {
        assert_eq!(assigned_channel_name("dev1/ai2", "temp"), "temp");
    }

    #[test]
    fn missing_name_falls_back_to_the_physical_specifier() {
        assert_eq!(assigned_channel_name("dev1/ai0:3", ""), "dev1/ai0:3");
    }

    #[test]
    fn grouped_lines_keep_the_raw_specifier() {
        assert_eq!(
            assigned_line_name("dev1/port0/line0:3", "bits", LineGrouping::ChanForAllLines),
            "dev1/port0/line0:3"
        );
        assert_eq!(
            assigned_line_name("dev1/port0/line0:3", "", LineGrouping::ChanForAllLines),
            "dev1/port0/line0..."
        );
    }

    #[test]
    fn per_line_grouping_follows_the_channel_rule() {
        assert_eq!(
            assigned_line_name("dev1/port0/line0:3", "bits", LineGrouping::ChanPerLine),
            "bits0:3"
        );
        assert_eq!(
            assigned_line_name("dev1/port0/line5", "", LineGrouping::ChanPerLine),
            "dev1/port0/line5"
        );
    }
}
