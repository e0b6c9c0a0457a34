use contracts::dashboards::d400_dashboard::DashboardResponse;

use crate::shared::api::get_json;
use crate::system::auth::AuthContext;

pub async fn get_dashboard(auth: AuthContext) -> Result<DashboardResponse, String> {
    get_json(auth, "/api/dashboard").await
}
