//! Writes a `Frame` to the page
//!
//! Cars and roads are absolutely positioned elements; traffic elements are
//! created and removed to match the snapshot.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::frame::{Frame, Sprite};

pub struct DomRenderer {
    document: Document,
    container: Element,
    roads: [HtmlElement; 2],
    player: HtmlElement,
    score: Element,
    restart: HtmlElement,
    /// Traffic elements by car ID
    traffic: HashMap<u32, HtmlElement>,
    last_score_text: String,
    /// Player size last written to the element
    player_size: Option<Vec2>,
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if el.is_none() {
        log::error!("Missing #{} element", id);
    }
    el
}

fn place(el: &HtmlElement, sprite: &Sprite) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", sprite.pos.x));
    let _ = style.set_property("top", &format!("{}px", sprite.pos.y));
}

/// Match the element box to the collision box
fn resize_to(el: &HtmlElement, sprite: &Sprite) {
    let style = el.style();
    let _ = style.set_property("width", &format!("{}px", sprite.size.x));
    let _ = style.set_property("height", &format!("{}px", sprite.size.y));
}

impl DomRenderer {
    /// Bind to the page's game elements; None if any are missing
    pub fn new(document: &Document) -> Option<Self> {
        let container = document.get_element_by_id("gameContainer");
        if container.is_none() {
            log::error!("Missing #gameContainer element");
        }

        let player = html_by_id(document, "playerCar")?;
        let _ = player
            .style()
            .set_property("background-image", "url('images/car.png')");

        Some(Self {
            document: document.clone(),
            container: container?,
            roads: [html_by_id(document, "road1")?, html_by_id(document, "road2")?],
            player,
            score: document.get_element_by_id("score")?,
            restart: html_by_id(document, "restartButton")?,
            traffic: HashMap::new(),
            last_score_text: String::new(),
            player_size: None,
        })
    }

    pub fn render(&mut self, frame: &Frame) {
        for (road, offset) in self.roads.iter().zip(frame.road_offsets) {
            let _ = road.style().set_property("top", &format!("{}px", offset));
        }

        if self.player_size != Some(frame.player.size) {
            resize_to(&self.player, &frame.player);
            self.player_size = Some(frame.player.size);
        }
        place(&self.player, &frame.player);
        self.sync_traffic(&frame.traffic);

        if frame.score_text != self.last_score_text {
            self.score.set_text_content(Some(&frame.score_text));
            self.last_score_text = frame.score_text.clone();
        }

        let display = if frame.restart_visible { "block" } else { "none" };
        let _ = self.restart.style().set_property("display", display);
    }

    /// Drop every traffic element (used on restart)
    pub fn clear(&mut self) {
        for (_, el) in self.traffic.drain() {
            el.remove();
        }
        self.last_score_text.clear();
    }

    fn sync_traffic(&mut self, sprites: &[Sprite]) {
        self.traffic.retain(|id, el| {
            let keep = sprites.iter().any(|s| s.id == *id);
            if !keep {
                el.remove();
            }
            keep
        });

        for sprite in sprites {
            if !self.traffic.contains_key(&sprite.id) {
                match self.create_car_element(sprite) {
                    Some(el) => {
                        self.traffic.insert(sprite.id, el);
                    }
                    None => {
                        log::warn!("Could not create element for car {}", sprite.id);
                        continue;
                    }
                }
            }
            if let Some(el) = self.traffic.get(&sprite.id) {
                place(el, sprite);
            }
        }
    }

    fn create_car_element(&self, sprite: &Sprite) -> Option<HtmlElement> {
        let el: HtmlElement = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into()
            .ok()?;
        el.set_class_name("car");
        let _ = el
            .style()
            .set_property("background-image", "url('images/car_reverse.png')");
        resize_to(&el, sprite);
        self.container.append_child(&el).ok()?;
        Some(el)
    }
}
