use crate::models::TvDetail;
use crate::TmdbClient;

impl TmdbClient {
    /// Fetch general detail for a TV series.
    pub async fn tv_detail(&self, id: i64) -> crate::Result<TvDetail> {
        let params = [("language", self.lang.clone())];
        self.get(&format!("/tv/{}", id), &params).await
    }
}
