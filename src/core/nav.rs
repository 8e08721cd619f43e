/// Which section wins when several ranges contain the scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    FirstMatch,
    #[default]
    LastMatch,
}

impl TieBreak {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first-match" => Some(TieBreak::FirstMatch),
            "last" | "last-match" => Some(TieBreak::LastMatch),
            _ => None,
        }
    }
}

/// Vertical extent of a page section, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: Option<&str>, top: f64, height: f64) -> Self {
        Self {
            id: id.map(str::to_string),
            top,
            height,
        }
    }

    /// Half-open range `[top - lookahead, top - lookahead + height)`.
    #[inline]
    pub fn contains(&self, scroll_y: f64, lookahead_px: f64) -> bool {
        let start = self.top - lookahead_px;
        scroll_y >= start && scroll_y < start + self.height
    }

    /// Fragment a nav link must carry to point at this section.
    pub fn fragment(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("#{id}"))
    }
}

/// Scroll-spy tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    pub lookahead_px: f64,
    pub header_threshold_px: f64,
    pub tie_break: TieBreak,
}

impl ScrollSpy {
    #[inline]
    pub fn header_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.header_threshold_px
    }

    /// Section whose range contains `scroll_y`, resolved by the tie-break.
    pub fn locate<'a>(&self, sections: &'a [SectionExtent], scroll_y: f64) -> Option<&'a SectionExtent> {
        let mut hits = sections
            .iter()
            .filter(|s| s.contains(scroll_y, self.lookahead_px));
        match self.tie_break {
            TieBreak::FirstMatch => hits.next(),
            TieBreak::LastMatch => hits.last(),
        }
    }
}

/// View state of the header, mobile menu and scroll-spy highlight.
#[derive(Clone, Debug)]
pub struct NavState {
    pub menu_open: bool,
    pub header_scrolled: bool,
    link_hrefs: Vec<String>,
    active_fragment: Option<String>,
}

impl NavState {
    pub fn new(link_hrefs: Vec<String>) -> Self {
        Self {
            menu_open: false,
            header_scrolled: false,
            link_hrefs,
            active_fragment: None,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu after a link click; returns true if it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Apply a scroll offset. Highlight is left untouched when no section
    /// matches; a matching section without an id clears every link.
    pub fn on_scroll(&mut self, spy: &ScrollSpy, scroll_y: f64, sections: &[SectionExtent]) {
        self.header_scrolled = spy.header_scrolled(scroll_y);
        if let Some(section) = spy.locate(sections, scroll_y) {
            self.active_fragment = section.fragment();
        }
    }

    /// Seed the highlight from markup before any scroll happens.
    pub fn set_active_fragment(&mut self, fragment: Option<String>) {
        self.active_fragment = fragment;
    }

    pub fn link_count(&self) -> usize {
        self.link_hrefs.len()
    }

    #[inline]
    pub fn is_link_active(&self, index: usize) -> bool {
        match (&self.active_fragment, self.link_hrefs.get(index)) {
            (Some(active), Some(href)) => active == href,
            _ => false,
        }
    }
}
