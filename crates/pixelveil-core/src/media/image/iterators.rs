use image::buffer::{Pixels, PixelsMut};
use image::{Rgb, RgbImage};
use std::slice::{Iter, IterMut};

/// Read access to the byte-slots of a carrier in canonical order: pixels row
/// by row, left to right, and the 3 color channels within each pixel.
pub(crate) struct Channels<'a> {
    pixels: Pixels<'a, Rgb<u8>>,
    colors: Option<Iter<'a, u8>>,
}

impl<'a> Channels<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self {
            pixels: image.pixels(),
            colors: None,
        }
    }
}

impl<'a> Iterator for Channels<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(*color);
            }
            match self.pixels.next() {
                Some(pixel) => self.colors = Some(pixel.0.iter()),
                None => return None,
            }
        }
    }
}

/// Mutable counterpart of [`Channels`], same traversal order. Embedding and
/// extraction both run on this pair, so the order cannot diverge.
pub(crate) struct ChannelsMut<'a> {
    pixels: PixelsMut<'a, Rgb<u8>>,
    colors: Option<IterMut<'a, u8>>,
}

impl<'a> ChannelsMut<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self {
            pixels: image.pixels_mut(),
            colors: None,
        }
    }
}

impl<'a> Iterator for ChannelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(|colors| colors.next()) {
                return Some(color);
            }
            match self.pixels.next() {
                Some(pixel) => self.colors = Some(pixel.0.iter_mut()),
                None => return None,
            }
        }
    }
}
