//! Remote image loading (hero + breed photos), kept in memory only

use super::App;
use crate::constants::*;
use crate::data::BREEDS;
use crate::types::ImageSlot;
use crate::utils::decode_image;
use eframe::egui;
use futures::StreamExt;
use tracing::{debug, warn};

type FetchError = Box<dyn std::error::Error + Send + Sync>;

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<egui::ColorImage, FetchError> {
    let bytes = client.get(url).send().await?.error_for_status()?.bytes().await?;
    let image = tokio::task::spawn_blocking(move || decode_image(&bytes)).await??;
    Ok(image)
}

impl App {
    pub fn start_image_fetch(&mut self, ctx: &egui::Context) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;

        let urls: Vec<&'static str> = std::iter::once(HERO_IMAGE_URL)
            .chain(BREEDS.iter().map(|b| b.image_url))
            .collect();

        if !self.load_images {
            debug!("Image loading disabled in settings");
            for url in urls {
                self.images.insert(url, ImageSlot::Failed);
            }
            return;
        }

        for url in &urls {
            self.images.insert(*url, ImageSlot::Loading);
        }
        debug!(count = urls.len(), "Starting image fetch");

        let inbox = self.image_inbox.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let client = match reqwest::Client::builder()
                .user_agent(format!("cat-facts/{}", APP_VERSION))
                .build()
            {
                Ok(client) => client,
                Err(e) => {
                    warn!(error = %e, "Failed to build HTTP client");
                    if let Ok(mut inbox) = inbox.lock() {
                        inbox.extend(urls.iter().map(|url| (*url, None)));
                    }
                    ctx.request_repaint();
                    return;
                }
            };

            futures::stream::iter(urls)
                .for_each_concurrent(IMAGE_FETCH_CONCURRENCY, |url| {
                    let client = &client;
                    let inbox = &inbox;
                    let ctx = &ctx;
                    async move {
                        let image = match fetch_image(client, url).await {
                            Ok(image) => Some(image),
                            Err(e) => {
                                warn!(error = %e, url, "Image fetch failed");
                                None
                            }
                        };
                        if let Ok(mut inbox) = inbox.lock() {
                            inbox.push((url, image));
                        }
                        ctx.request_repaint();
                    }
                })
                .await;
        });
    }

    /// Upload finished downloads as textures
    pub fn poll_images(&mut self, ctx: &egui::Context) {
        let ready: Vec<_> = match self.image_inbox.lock() {
            Ok(mut inbox) => inbox.drain(..).collect(),
            Err(_) => return,
        };
        for (url, image) in ready {
            let slot = match image {
                Some(image) => ImageSlot::Ready(ctx.load_texture(url, image, egui::TextureOptions::LINEAR)),
                None => ImageSlot::Failed,
            };
            self.images.insert(url, slot);
        }
    }

    pub fn image(&self, url: &str) -> ImageSlot {
        self.images.get(url).cloned().unwrap_or(ImageSlot::Loading)
    }
}
