use crate::channel::Channel;
use crate::constants::LineGrouping;

/// One or more digital input/output virtual channels.
///
/// Digital channels carry no per-attribute native accessors in this ABI
/// surface; the object records the identity pair plus the grouping the
/// lines were created with.
#[derive(Debug)]
pub struct DIOChannel {
    pub(crate) inner: Channel,
    pub(crate) line_grouping: LineGrouping,
}

impl DIOChannel {
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Grouping the channel's lines were created with.
    pub fn line_grouping(&self) -> LineGrouping {
        self.line_grouping
    }
}
