use crate::core::video::{pair_buttons, VideoCommand, VideoDeck};
use crate::core::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Slot {
    button: web::Element,
    video: web::HtmlVideoElement,
}

struct Players {
    slots: Vec<Slot>,
    deck: RefCell<VideoDeck>,
}

impl Players {
    fn paused(&self) -> Vec<bool> {
        self.slots.iter().map(|s| s.video.paused()).collect()
    }

    fn render(&self) {
        let deck = self.deck.borrow();
        for (i, slot) in self.slots.iter().enumerate() {
            let (glyph, overlay) = deck.appearance(i);
            slot.button.set_text_content(Some(glyph));
            dom::set_parent_background(&slot.button, overlay);
        }
    }
}

/// Exclusive playback for project preview videos.
pub fn wire_videos(document: &web::Document) -> Result<(), SetupError> {
    let videos: Vec<web::HtmlVideoElement> = dom::query_all(document, SEL_VIDEOS);
    let buttons: Vec<web::Element> = dom::query_all(document, SEL_PLAY_BUTTONS);
    if buttons.is_empty() {
        return Err(SetupError::missing(SEL_PLAY_BUTTONS));
    }

    let video_ids: Vec<Option<String>> = videos
        .iter()
        .map(|v| Some(v.id()).filter(|id| !id.is_empty()))
        .collect();
    let button_refs: Vec<Option<String>> = buttons
        .iter()
        .map(|b| b.get_attribute(ATTR_VIDEO_ID))
        .collect();
    let pairs = pair_buttons(&video_ids, &button_refs)?;

    let slots: Vec<Slot> = buttons
        .into_iter()
        .zip(pairs)
        .map(|(button, vi)| Slot {
            button,
            video: videos[vi].clone(),
        })
        .collect();
    let players = Rc::new(Players {
        deck: RefCell::new(VideoDeck::new(slots.len())),
        slots,
    });

    for (i, slot) in players.slots.iter().enumerate() {
        let p = players.clone();
        dom::add_click_listener(&slot.button, move |_| {
            let paused = p.paused();
            let cmds = p.deck.borrow_mut().press(i, &paused);
            log::debug!("[video] slot {} pressed, playing {:?}", i, p.deck.borrow().playing());
            for cmd in cmds {
                match cmd {
                    VideoCommand::Pause(j) => {
                        _ = p.slots[j].video.pause();
                    }
                    VideoCommand::Play(j) => play(&p, j),
                }
            }
            p.render();
        });

        let p = players.clone();
        dom::add_listener(&slot.video, "ended", move |_: web::Event| {
            p.deck.borrow_mut().stopped(i);
            p.render();
        });
    }

    log::info!("[video] wired {} players", players.slots.len());
    Ok(())
}

fn play(players: &Rc<Players>, slot: usize) {
    match players.slots[slot].video.play() {
        Ok(promise) => {
            let p = players.clone();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[video] play() rejected for slot {}: {:?}", slot, e);
                    p.deck.borrow_mut().stopped(slot);
                    p.render();
                }
            });
        }
        Err(e) => {
            log::warn!("[video] play() failed for slot {}: {:?}", slot, e);
            players.deck.borrow_mut().stopped(slot);
        }
    }
}
