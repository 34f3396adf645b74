pub mod catalog;
pub mod error;
pub mod rankings;
pub mod recommendation;

use actix_web::web;

/// 注册对外的目录 API 路由
pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/search-wines").route(web::get().to(catalog::search_wines)));
    cfg.service(web::resource("/weekly-rankings").route(web::get().to(rankings::weekly_rankings)));
    cfg.service(
        web::resource("/record-selection").route(web::post().to(rankings::record_selection)),
    );
    cfg.service(
        web::resource("/api/recommendations")
            .route(web::post().to(recommendation::recommendations)),
    );
}
