use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::routes::{redirect, render_template};
use tera::{Context, Tera};

use crate::forms::vehicle_model::VehicleModelForm;
use crate::repository::DieselRepository;
use crate::routes::{ListQueryParams, base_context};
use crate::services::{ServiceError, vehicle_make as make_service, vehicle_model as model_service};

/// Renders a model form together with the make selector.
fn render_model_form(
    tera: &Tera,
    repo: &DieselRepository,
    mut context: Context,
    template: &str,
    form: &VehicleModelForm,
) -> HttpResponse {
    match make_service::list_all_vehicle_makes(repo) {
        Ok(makes) => {
            context.insert("makes", &makes);
            context.insert("form", form);
            render_template(tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to list makes: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/models")]
pub async fn list_models(
    params: web::Query<ListQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match model_service::list_vehicle_models(repo.get_ref(), &params.to_filtering_params()) {
        Ok(models) => {
            let mut context = base_context(&flash_messages, "models");
            params.insert_into(&mut context);
            context.insert("models", &models);
            render_template(&tera, "models/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list models: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/models/create")]
pub async fn show_create_model(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "models");
    render_model_form(
        &tera,
        repo.get_ref(),
        context,
        "models/create.html",
        &VehicleModelForm::default(),
    )
}

#[post("/models/create")]
pub async fn create_model(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<VehicleModelForm>,
) -> impl Responder {
    let rerender = |form: &VehicleModelForm, message: &str| {
        let mut context = base_context(&flash_messages, "models");
        context.insert("form_error", message);
        render_model_form(&tera, repo.get_ref(), context, "models/create.html", form)
    };

    let dto = match form.clone().into_create_dto() {
        Ok(dto) => dto,
        Err(err) => return rerender(&form, &format!("Please fill in every field: {err}")),
    };

    match model_service::create_vehicle_model(repo.get_ref(), dto) {
        Ok(model) => {
            FlashMessage::success(format!("Model \"{}\" created.", model.name)).send();
            redirect(&format!("/models/{}", model.id))
        }
        Err(ServiceError::NotFound) => rerender(&form, "The selected make does not exist."),
        Err(ServiceError::TypeConstraint(message)) => rerender(&form, &message),
        Err(err) => {
            log::error!("Failed to create model: {err}");
            rerender(&form, "Could not save the model.")
        }
    }
}

#[get("/models/{model_id}")]
pub async fn show_model(
    model_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match model_service::get_vehicle_model_by_id(repo.get_ref(), model_id.into_inner()) {
        Ok(Some(model)) => {
            let mut context = base_context(&flash_messages, "models");
            context.insert("model", &model);
            render_template(&tera, "models/show.html", &context)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load model: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/models/{model_id}/edit")]
pub async fn show_edit_model(
    model_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match model_service::get_vehicle_model_by_id(repo.get_ref(), model_id.into_inner()) {
        Ok(Some(model)) => {
            let mut context = base_context(&flash_messages, "models");
            context.insert("model_id", &model.id);
            render_model_form(
                &tera,
                repo.get_ref(),
                context,
                "models/edit.html",
                &VehicleModelForm::from(model),
            )
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load model: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/models/{model_id}/edit")]
pub async fn update_model(
    model_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<VehicleModelForm>,
) -> impl Responder {
    let model_id = model_id.into_inner();

    let dto = match form.into_update_dto() {
        Ok(dto) => dto,
        Err(err) => {
            FlashMessage::error(format!("Please fill in every field: {err}")).send();
            return redirect(&format!("/models/{model_id}/edit"));
        }
    };

    if model_service::update_vehicle_model(repo.get_ref(), model_id, dto) {
        FlashMessage::success("Model updated.").send();
        redirect(&format!("/models/{model_id}"))
    } else {
        FlashMessage::error("Could not update the model.").send();
        redirect("/models")
    }
}

#[get("/models/{model_id}/delete")]
pub async fn show_delete_model(
    model_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match model_service::get_vehicle_model_by_id(repo.get_ref(), model_id.into_inner()) {
        Ok(Some(model)) => {
            let mut context = base_context(&flash_messages, "models");
            context.insert("model", &model);
            render_template(&tera, "models/delete.html", &context)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load model: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/models/{model_id}/delete")]
pub async fn delete_model(
    model_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if model_service::delete_vehicle_model(repo.get_ref(), model_id.into_inner()) {
        FlashMessage::success("Model deleted.").send();
    } else {
        FlashMessage::error("Could not delete the model.").send();
    }
    redirect("/models")
}
