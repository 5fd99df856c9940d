//! Photo galleries: the slide engine, its renderings, and the site's
//! curated collections.

use dioxus::prelude::*;

pub mod engine;
pub mod view;

pub use engine::{ActiveMarks, ActiveSet, SliderEngine, SWIPE_THRESHOLD};
pub use view::{GalleryGrid, GallerySlider, STAGGER_STEP_MS};

/// One photograph in a collection.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryItem {
    pub image: Asset,
}

/// The four pieces shown in the touch slider.
pub fn featured_collection() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            image: asset!("/assets/gallery/featured-01.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/featured-02.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/featured-03.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/featured-04.svg"),
        },
    ]
}

/// The wider selection shown as a hover grid below the slider.
pub fn studio_collection() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            image: asset!("/assets/gallery/studio-01.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/studio-02.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/studio-03.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/studio-04.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/studio-05.svg"),
        },
        GalleryItem {
            image: asset!("/assets/gallery/studio-06.svg"),
        },
    ]
}
