use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use estoque_core::{PaginationMeta, PaginationParams};
use estoque_models::alerts::{AlertClassification, AlertLevel};
use estoque_models::comodato::{
    ComodatoItem, ComodatoListResponse, CreateComodatoItemDto, UpdateComodatoItemDto,
};
use estoque_models::dashboard::{AlertaCount, CategoriaTotal, DashboardResponse, StatusCount};
use estoque_models::estoque::{
    CreateEstoqueItemDto, EstoqueItem, EstoqueItemResponse, EstoqueListResponse,
    UpdateEstoqueItemDto,
};
use estoque_models::movimentacoes::{
    CreateMovimentacaoDto, Movimentacao, PaginatedMovimentacoesResponse,
};
use estoque_models::permissions::{
    SavePermissionsDto, UserPermissionRow, UserPermissionsResponse,
};
use estoque_models::profiles::{RoleChangeResponse, UserWithRole, UsersResponse};
use estoque_models::{AccessState, AppRole, PermissionSet};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::access::controller::get_my_access,
        crate::modules::alerts::controller::classify_quantity,
        crate::modules::estoque::controller::list_items,
        crate::modules::estoque::controller::get_item,
        crate::modules::estoque::controller::create_item,
        crate::modules::estoque::controller::update_item,
        crate::modules::estoque::controller::delete_item,
        crate::modules::comodato::controller::list_items,
        crate::modules::comodato::controller::get_item,
        crate::modules::comodato::controller::create_item,
        crate::modules::comodato::controller::update_item,
        crate::modules::comodato::controller::delete_item,
        crate::modules::movimentados::controller::list_movimentacoes,
        crate::modules::movimentados::controller::get_movimentacao,
        crate::modules::movimentados::controller::record_movimentacao,
        crate::modules::dashboard::controller::get_dashboard,
        crate::modules::admin::controller::list_users,
        crate::modules::admin::controller::delete_user,
        crate::modules::admin::controller::grant_admin,
        crate::modules::admin::controller::revoke_admin,
        crate::modules::admin::controller::get_user_permissions,
        crate::modules::admin::controller::save_user_permissions,
    ),
    components(
        schemas(
            AccessState,
            PermissionSet,
            AppRole,
            AlertLevel,
            AlertClassification,
            EstoqueItem,
            EstoqueItemResponse,
            EstoqueListResponse,
            CreateEstoqueItemDto,
            UpdateEstoqueItemDto,
            ComodatoItem,
            ComodatoListResponse,
            CreateComodatoItemDto,
            UpdateComodatoItemDto,
            Movimentacao,
            CreateMovimentacaoDto,
            PaginatedMovimentacoesResponse,
            CategoriaTotal,
            StatusCount,
            AlertaCount,
            DashboardResponse,
            UserWithRole,
            UsersResponse,
            RoleChangeResponse,
            UserPermissionRow,
            UserPermissionsResponse,
            SavePermissionsDto,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Access", description = "Resolved access for the current user"),
        (name = "Alerts", description = "Stock level classification"),
        (name = "Estoque", description = "IT asset inventory"),
        (name = "Comodato", description = "Loaned and rented equipment"),
        (name = "Movimentados", description = "Movement history"),
        (name = "Dashboard", description = "Inventory charts"),
        (name = "Administration", description = "Users, admin roles and permissions")
    ),
    info(
        title = "Estoque TI API",
        version = "0.1.0",
        description = "IT inventory management with per-module permissions, built with Rust, Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
