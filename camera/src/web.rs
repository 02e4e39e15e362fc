//! Browser bindings for the device traits.

use crate::capture::ImageFormat;
use crate::device::{
    FrameSize, LocalBoxFuture, MediaDevices, MediaStream, MediaTrack, Surface, VideoConstraints,
    VideoSink,
};
use crate::error::{AcquireError, PlaybackError, SurfaceError};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn js_message(value: &JsValue) -> String {
    if let Some(dom) = value.dyn_ref::<web_sys::DomException>() {
        return dom.message();
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn ideal(value: u32) -> Result<Object, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"ideal".into(), &JsValue::from(value))?;
    Ok(obj)
}

fn video_constraints(c: &VideoConstraints) -> Result<web_sys::MediaStreamConstraints, JsValue> {
    let video = Object::new();
    Reflect::set(&video, &"width".into(), &ideal(c.ideal_width)?)?;
    Reflect::set(&video, &"height".into(), &ideal(c.ideal_height)?)?;
    Reflect::set(&video, &"facingMode".into(), &c.facing_mode.as_str().into())?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::from_bool(c.audio));
    Ok(constraints)
}

/// `navigator.mediaDevices`, if the browser has it.
pub struct WebMediaDevices {
    devices: Option<web_sys::MediaDevices>,
}

impl WebMediaDevices {
    pub fn from_window() -> Self {
        let devices = web_sys::window().and_then(|w| w.navigator().media_devices().ok());
        Self { devices }
    }
}

impl MediaDevices for WebMediaDevices {
    type Stream = WebStream;
    type Acquire = LocalBoxFuture<Result<WebStream, AcquireError>>;

    fn is_supported(&self) -> bool {
        self.devices.is_some()
    }

    fn get_user_media(&self, constraints: &VideoConstraints) -> Self::Acquire {
        let promise = self
            .devices
            .as_ref()
            .ok_or_else(|| AcquireError::Other("mediaDevices unavailable".into()))
            .and_then(|devices| {
                video_constraints(constraints)
                    .and_then(|c| devices.get_user_media_with_constraints(&c))
                    .map_err(|e| AcquireError::Other(js_message(&e)))
            });
        Box::pin(async move {
            let value = JsFuture::from(promise?).await.map_err(|e| {
                match e.dyn_ref::<web_sys::DomException>() {
                    Some(dom) => AcquireError::from_dom_name(&dom.name(), dom.message()),
                    None => AcquireError::Other(js_message(&e)),
                }
            })?;
            value
                .dyn_into::<web_sys::MediaStream>()
                .map(WebStream)
                .map_err(|e| AcquireError::Other(js_message(&e)))
        })
    }
}

pub struct WebStream(pub web_sys::MediaStream);

pub struct WebTrack(web_sys::MediaStreamTrack);

impl MediaTrack for WebTrack {
    fn stop(&self) {
        self.0.stop();
    }
}

impl MediaStream for WebStream {
    type Track = WebTrack;

    fn tracks(&self) -> Vec<WebTrack> {
        self.0
            .get_tracks()
            .iter()
            .filter_map(|t| t.dyn_into::<web_sys::MediaStreamTrack>().ok())
            .map(WebTrack)
            .collect()
    }
}

/// A `<video>` element used as the live preview.
pub struct WebVideoSink(pub web_sys::HtmlVideoElement);

impl VideoSink<WebStream> for WebVideoSink {
    type Play = LocalBoxFuture<Result<(), PlaybackError>>;

    fn attach(&mut self, stream: &WebStream) {
        self.0.set_src_object(Some(&stream.0));
    }

    fn detach(&mut self) {
        self.0.set_src_object(None);
    }

    fn play(&mut self) -> Self::Play {
        let started = self.0.play();
        Box::pin(async move {
            let promise = started.map_err(|e| PlaybackError(js_message(&e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackError(js_message(&e)))
        })
    }

    fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.0.video_width(), self.0.video_height())
    }
}

/// A `<canvas>` stills are drawn into.
pub struct WebSurface(pub web_sys::HtmlCanvasElement);

impl Surface<WebVideoSink> for WebSurface {
    fn draw_frame(&mut self, source: &WebVideoSink, size: FrameSize) -> Result<(), SurfaceError> {
        self.0.set_width(size.width);
        self.0.set_height(size.height);
        let context = self
            .0
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        context
            .draw_image_with_html_video_element(&source.0, 0.0, 0.0)
            .map_err(|e| SurfaceError::Draw(js_message(&e)))
    }

    fn encode(&self, format: ImageFormat, quality: f64) -> Result<String, SurfaceError> {
        self.0
            .to_data_url_with_type_and_encoder_options(format.mime(), &JsValue::from_f64(quality))
            .map_err(|e| SurfaceError::Encode(js_message(&e)))
    }
}
