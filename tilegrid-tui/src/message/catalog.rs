//! 后台结果消息

use tilegrid_core::LoadReport;

use crate::backend::ListingResult;

#[derive(Debug)]
pub enum CatalogMessage {
    /// 首页请求完成
    ListingLoaded(ListingResult),
    /// 若干延迟行已结算（成功或失败）
    RowsSettled(Vec<LoadReport>),
}
