use crate::models::TvImages;
use crate::TmdbClient;

impl TmdbClient {
    /// Fetch poster and backdrop candidates for a TV series.
    pub async fn tv_images(&self, id: i64) -> crate::Result<TvImages> {
        self.get(&format!("/tv/{}/images", id), &[]).await
    }
}
