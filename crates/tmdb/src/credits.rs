use crate::models::AggregateCredits;
use crate::TmdbClient;

impl TmdbClient {
    /// Fetch the aggregated cast list for a TV series.
    ///
    /// Cast entries are returned in TMDb's billing order; an actor with
    /// multiple roles across seasons appears once with all roles listed.
    pub async fn aggregate_credits(&self, id: i64) -> crate::Result<AggregateCredits> {
        let params = [("language", self.lang.clone())];
        self.get(&format!("/tv/{}/aggregate_credits", id), &params)
            .await
    }
}
