use std::sync::OnceLock;

use scraper::Selector;

/// CSS selector compiled on first use, so it can live in a `static`.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("invalid static selector {:?}: {e:?}", self.source))
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x:ident <- $sel:literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
