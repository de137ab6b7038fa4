//! Initial gallery content
//!
//! The collection is populated once, on first startup, with a fixed and
//! reproducible set of items. Emptiness is detected with a bounded existence
//! probe, so a partially seeded collection is never topped up.

use gallery_core::models::{NewGalleryItem, ITEM_TYPE_IMAGE, ITEM_TYPE_VIDEO};

use super::store::GalleryStore;

/// Layout heights cycled through by the synthetic ranges.
pub const SEED_HEIGHTS: [&str; 4] = ["h-56", "h-64", "h-72", "h-80"];

const SYNTHETIC_IMAGE_CATEGORIES: [&str; 3] = ["photography", "art", "design"];
const SYNTHETIC_IMAGES: std::ops::Range<usize> = 20..50;
const SYNTHETIC_VIDEOS: std::ops::Range<usize> = 50..80;
const SYNTHETIC_VIDEO_URL: &str =
    "https://sample-videos.com/zip/10/mp4/SampleVideo_640x360_1mb.mp4";

struct CuratedItem {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    video_url: Option<&'static str>,
    description: &'static str,
    height: &'static str,
    featured: bool,
    tags: [&'static str; 3],
}

const CURATED: &[CuratedItem] = &[
    CuratedItem {
        title: "Urban Landscape",
        category: "photography",
        image: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Capturing the essence of modern city life through dramatic architectural perspectives and urban lighting",
        height: "h-64",
        featured: true,
        tags: ["urban", "architecture", "cityscape"],
    },
    CuratedItem {
        title: "Portrait Series",
        category: "photography",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: None,
        description: "Intimate portraits exploring human emotion and expression through careful composition and lighting",
        height: "h-80",
        featured: false,
        tags: ["portrait", "emotion", "studio"],
    },
    CuratedItem {
        title: "Nature's Symphony",
        category: "photography",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=500",
        video_url: None,
        description: "Breathtaking landscapes showcasing the raw beauty and power of the natural world",
        height: "h-56",
        featured: true,
        tags: ["nature", "landscape", "outdoor"],
    },
    CuratedItem {
        title: "Street Photography",
        category: "photography",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=650",
        video_url: None,
        description: "Candid moments of urban life captured through spontaneous street photography",
        height: "h-72",
        featured: false,
        tags: ["street", "candid", "urban"],
    },
    CuratedItem {
        title: "Architectural Details",
        category: "photography",
        image: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Exploring geometric patterns and textures in contemporary architecture",
        height: "h-64",
        featured: false,
        tags: ["architecture", "geometry", "modern"],
    },
    CuratedItem {
        title: "Cultural Heritage",
        category: "photography",
        image: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=750",
        video_url: None,
        description: "Documenting traditional crafts and cultural practices around the world",
        height: "h-84",
        featured: true,
        tags: ["culture", "tradition", "heritage"],
    },
    CuratedItem {
        title: "Abstract Compositions",
        category: "photography",
        image: "https://images.unsplash.com/photo-1549490349-8643362247b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=500",
        video_url: None,
        description: "Experimental photography exploring color, form, and abstract visual concepts",
        height: "h-56",
        featured: false,
        tags: ["abstract", "experimental", "color"],
    },
    CuratedItem {
        title: "Wildlife Photography",
        category: "photography",
        image: "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: None,
        description: "Intimate glimpses into the world of wildlife and animal behavior",
        height: "h-80",
        featured: true,
        tags: ["wildlife", "animals", "nature"],
    },
    CuratedItem {
        title: "Macro Photography",
        category: "photography",
        image: "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Discovering the intricate details of the microscopic world around us",
        height: "h-64",
        featured: false,
        tags: ["macro", "detail", "close-up"],
    },
    CuratedItem {
        title: "Night Photography",
        category: "photography",
        image: "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: None,
        description: "Capturing the magic and mystery of the nocturnal world",
        height: "h-80",
        featured: true,
        tags: ["night", "low-light", "atmospheric"],
    },
    CuratedItem {
        title: "Contemporary Sculpture",
        category: "art",
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Modern sculptural works exploring form, space, and material innovation",
        height: "h-64",
        featured: true,
        tags: ["sculpture", "modern", "3d"],
    },
    CuratedItem {
        title: "Digital Paintings",
        category: "art",
        image: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=650",
        video_url: None,
        description: "Digital art pieces blending traditional painting techniques with modern technology",
        height: "h-72",
        featured: false,
        tags: ["digital", "painting", "technology"],
    },
    CuratedItem {
        title: "Mixed Media Art",
        category: "art",
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=550",
        video_url: None,
        description: "Experimental artworks combining various materials and artistic mediums",
        height: "h-60",
        featured: false,
        tags: ["mixed-media", "experimental", "collage"],
    },
    CuratedItem {
        title: "Installation Art",
        category: "art",
        image: "https://images.unsplash.com/photo-1578321272176-b7bbc0679853?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: None,
        description: "Large-scale installations creating immersive artistic experiences",
        height: "h-80",
        featured: true,
        tags: ["installation", "immersive", "large-scale"],
    },
    CuratedItem {
        title: "Abstract Expressionism",
        category: "art",
        image: "https://images.unsplash.com/photo-1549490349-8643362247b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Bold abstract works expressing emotion through color and gestural brushwork",
        height: "h-64",
        featured: false,
        tags: ["abstract", "expressionism", "color"],
    },
    CuratedItem {
        title: "Minimalist Design",
        category: "design",
        image: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=500",
        video_url: None,
        description: "Clean, minimalist design solutions emphasizing simplicity and functionality",
        height: "h-56",
        featured: true,
        tags: ["minimalist", "clean", "functional"],
    },
    CuratedItem {
        title: "Typography Art",
        category: "design",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=650",
        video_url: None,
        description: "Creative typography designs exploring letterforms as artistic expression",
        height: "h-72",
        featured: false,
        tags: ["typography", "lettering", "graphic"],
    },
    CuratedItem {
        title: "Brand Identity",
        category: "design",
        image: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: None,
        description: "Comprehensive brand identity systems for contemporary businesses",
        height: "h-64",
        featured: false,
        tags: ["branding", "identity", "logo"],
    },
    CuratedItem {
        title: "UI/UX Design",
        category: "design",
        image: "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: None,
        description: "Modern user interface and experience design for digital applications",
        height: "h-80",
        featured: true,
        tags: ["ui", "ux", "digital"],
    },
    CuratedItem {
        title: "Cinematic Short Film",
        category: "video",
        image: "https://images.unsplash.com/photo-1489599063916-f4e4b71c2f87?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: Some("https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4"),
        description: "A captivating short film exploring themes of solitude and urban life",
        height: "h-64",
        featured: true,
        tags: ["film", "cinematic", "narrative"],
    },
    CuratedItem {
        title: "Motion Graphics Demo",
        category: "video",
        image: "https://images.unsplash.com/photo-1536240478700-b869070f9279?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=700",
        video_url: Some("https://sample-videos.com/zip/10/mp4/SampleVideo_640x360_1mb.mp4"),
        description: "Dynamic motion graphics showcasing brand identity and visual storytelling",
        height: "h-80",
        featured: false,
        tags: ["motion", "graphics", "animation"],
    },
    CuratedItem {
        title: "Documentary Excerpt",
        category: "video",
        image: "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=500",
        video_url: Some("https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4"),
        description: "Documentary piece examining contemporary art movements and their impact",
        height: "h-56",
        featured: true,
        tags: ["documentary", "art", "culture"],
    },
    CuratedItem {
        title: "Time-lapse Photography",
        category: "video",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=650",
        video_url: Some("https://sample-videos.com/zip/10/mp4/SampleVideo_640x360_2mb.mp4"),
        description: "Mesmerizing time-lapse sequences capturing the rhythm of city life",
        height: "h-72",
        featured: false,
        tags: ["timelapse", "city", "rhythm"],
    },
    CuratedItem {
        title: "3D Animation Showcase",
        category: "video",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=600",
        video_url: Some("https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4"),
        description: "Cutting-edge 3D animation demonstrating technical artistry and creativity",
        height: "h-64",
        featured: true,
        tags: ["3d", "animation", "technical"],
    },
];

fn tags(values: [&str; 3]) -> Option<Vec<String>> {
    Some(values.iter().map(|t| t.to_string()).collect())
}

impl CuratedItem {
    fn to_new_item(&self) -> NewGalleryItem {
        let item_type = if self.video_url.is_some() {
            ITEM_TYPE_VIDEO
        } else {
            ITEM_TYPE_IMAGE
        };

        NewGalleryItem {
            title: self.title.to_string(),
            category: self.category.to_string(),
            item_type: item_type.to_string(),
            image: self.image.to_string(),
            video_url: self.video_url.map(str::to_string),
            description: self.description.to_string(),
            height: self.height.to_string(),
            featured: self.featured,
            tags: tags(self.tags),
        }
    }
}

fn synthetic_image(i: usize) -> NewGalleryItem {
    NewGalleryItem {
        title: format!("Gallery Item {}", i + 1),
        category: SYNTHETIC_IMAGE_CATEGORIES[i % 3].to_string(),
        item_type: ITEM_TYPE_IMAGE.to_string(),
        image: format!("https://picsum.photos/500/600?random={}", i),
        video_url: None,
        description: format!(
            "Professional artwork showcasing creative excellence and artistic vision - Item {}",
            i + 1
        ),
        height: SEED_HEIGHTS[i % 4].to_string(),
        featured: i % 5 == 0,
        tags: tags(["creative", "professional", "artistic"]),
    }
}

fn synthetic_video(i: usize) -> NewGalleryItem {
    let n = i - SYNTHETIC_VIDEOS.start + 1;
    NewGalleryItem {
        title: format!("Video Content {}", n),
        category: "video".to_string(),
        item_type: ITEM_TYPE_VIDEO.to_string(),
        image: format!("https://picsum.photos/500/600?random={}", i + 100),
        video_url: Some(SYNTHETIC_VIDEO_URL.to_string()),
        description: format!(
            "Professional video content showcasing cinematic excellence - Video {}",
            n
        ),
        height: SEED_HEIGHTS[i % 4].to_string(),
        featured: i % 7 == 0,
        tags: tags(["video", "cinematic", "professional"]),
    }
}

/// The full seed set, in insertion order.
pub fn seed_items() -> Vec<NewGalleryItem> {
    CURATED
        .iter()
        .map(CuratedItem::to_new_item)
        .chain(SYNTHETIC_IMAGES.map(synthetic_image))
        .chain(SYNTHETIC_VIDEOS.map(synthetic_video))
        .collect()
}

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many items were inserted.
    Seeded(u64),
    AlreadyPopulated,
    /// The store could not be probed or written; the error was logged.
    Failed,
}

/// Seed `store` if it holds no items. Never returns an error: failures are
/// logged and the service keeps running with whatever the store holds.
pub async fn initialize(store: &dyn GalleryStore) -> SeedOutcome {
    match store.has_any_items().await {
        Ok(true) => {
            tracing::debug!("Gallery already populated, skipping seed");
            SeedOutcome::AlreadyPopulated
        }
        Ok(false) => match store.insert_gallery_items(seed_items()).await {
            Ok(count) => {
                tracing::info!(count = count, "Seeded gallery items");
                SeedOutcome::Seeded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to insert seed gallery items");
                SeedOutcome::Failed
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to check gallery for existing items");
            SeedOutcome::Failed
        }
    }
}
