use super::constants::{OVERLAY_IDLE_BG, OVERLAY_PLAYING_BG, PAUSE_GLYPH, PLAY_GLYPH};
use super::error::SetupError;
use smallvec::SmallVec;

/// Media call the wiring must perform on a slot's video.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCommand {
    Play(usize),
    Pause(usize),
}

pub type VideoCommands = SmallVec<[VideoCommand; 4]>;

/// Resolve which video each play button controls.
///
/// When any button names a video through its identifier attribute, every
/// button must do so. Otherwise buttons pair with videos by position and the
/// lists must have the same length. Returns one video index per button.
pub fn pair_buttons(
    video_ids: &[Option<String>],
    button_refs: &[Option<String>],
) -> Result<Vec<usize>, SetupError> {
    let by_id = button_refs.iter().any(Option::is_some);
    if !by_id {
        if video_ids.len() != button_refs.len() {
            return Err(SetupError::PairingMismatch {
                videos: video_ids.len(),
                buttons: button_refs.len(),
            });
        }
        return Ok((0..button_refs.len()).collect());
    }

    let mut pairs = Vec::with_capacity(button_refs.len());
    for (i, r) in button_refs.iter().enumerate() {
        let wanted = r.as_deref().ok_or_else(|| SetupError::BrokenReference {
            source_desc: format!("play button {i}"),
            target: "<no data-video>".to_string(),
        })?;
        let video = video_ids
            .iter()
            .position(|id| id.as_deref() == Some(wanted))
            .ok_or_else(|| SetupError::BrokenReference {
                source_desc: format!("play button {i}"),
                target: wanted.to_string(),
            })?;
        if pairs.contains(&video) {
            return Err(SetupError::BrokenReference {
                source_desc: format!("play button {i}"),
                target: format!("{wanted} (already paired)"),
            });
        }
        pairs.push(video);
    }
    Ok(pairs)
}

/// Exclusive playback across a fixed set of button/video slots.
#[derive(Clone, Debug)]
pub struct VideoDeck {
    slots: usize,
    playing: Option<usize>,
}

impl VideoDeck {
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            playing: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots == 0
    }

    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    /// Button press on `slot`. `paused` is the observed paused flag of every
    /// slot's video (missing entries count as paused).
    pub fn press(&mut self, slot: usize, paused: &[bool]) -> VideoCommands {
        let mut cmds = VideoCommands::new();
        if slot >= self.slots {
            return cmds;
        }
        let is_paused = |i: usize| paused.get(i).copied().unwrap_or(true);
        if is_paused(slot) {
            for other in (0..self.slots).filter(|&j| j != slot && !is_paused(j)) {
                cmds.push(VideoCommand::Pause(other));
            }
            cmds.push(VideoCommand::Play(slot));
            self.playing = Some(slot);
        } else {
            cmds.push(VideoCommand::Pause(slot));
            self.playing = None;
        }
        cmds
    }

    /// The slot's video finished or refused to start.
    pub fn stopped(&mut self, slot: usize) {
        if self.playing == Some(slot) {
            self.playing = None;
        }
    }

    /// Button glyph and overlay background for `slot`.
    pub fn appearance(&self, slot: usize) -> (&'static str, &'static str) {
        if self.playing == Some(slot) {
            (PAUSE_GLYPH, OVERLAY_PLAYING_BG)
        } else {
            (PLAY_GLYPH, OVERLAY_IDLE_BG)
        }
    }
}
