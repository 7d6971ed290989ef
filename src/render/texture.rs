use super::mesh::Pixels;
use crate::core::loading::load_concurrently;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Issue the request now; the returned future only waits for the body.
fn start_fetch(window: Option<&web::Window>, url: &str) -> impl std::future::Future<Output = anyhow::Result<Vec<u8>>> {
    let request = window.map(|w| w.fetch_with_str(url));
    let url = url.to_string();
    async move {
        let request = request.ok_or_else(|| anyhow!("no window"))?;
        let resp = JsFuture::from(request)
            .await
            .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
        let resp: web::Response = resp
            .dyn_into()
            .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
        if !resp.ok() {
            return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
        }
        let promise = resp
            .array_buffer()
            .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
        let buf = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
        Ok(js_sys::Uint8Array::new(&buf).to_vec())
    }
}

fn decode(bytes: &[u8]) -> anyhow::Result<Pixels> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(Pixels {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Load every texture of a scene, all requests in flight at once. A failed
/// load leaves its slot empty so the material renders untextured.
pub(crate) async fn load_all(urls: &[String]) -> Vec<Option<Pixels>> {
    let window = web::window();
    let fetched = load_concurrently(urls, |url| start_fetch(window.as_ref(), url)).await;
    urls.iter()
        .zip(fetched)
        .map(|(url, bytes)| match bytes.and_then(|b| decode(&b)) {
            Ok(p) => {
                log::debug!("texture {} {}x{}", url, p.width, p.height);
                Some(p)
            }
            Err(e) => {
                log::warn!("texture {} unavailable: {:?}", url, e);
                None
            }
        })
        .collect()
}
