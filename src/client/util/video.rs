/// Rewrites a video watch URL into its embeddable form
///
/// `https://www.youtube.com/watch?v=ID` becomes `https://www.youtube.com/embed/ID`. URLs
/// without a watch query are returned unchanged.
pub fn embed_url(video: &str) -> String {
    video.replace("watch?v=", "embed/")
}
