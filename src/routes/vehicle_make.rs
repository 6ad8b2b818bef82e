use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::forms::vehicle_make::VehicleMakeForm;
use crate::repository::DieselRepository;
use crate::routes::{ListQueryParams, base_context};
use crate::services::{ServiceError, vehicle_make as make_service};

#[get("/makes")]
pub async fn list_makes(
    params: web::Query<ListQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match make_service::list_vehicle_makes(repo.get_ref(), &params.to_filtering_params()) {
        Ok(makes) => {
            let mut context = base_context(&flash_messages, "makes");
            params.insert_into(&mut context);
            context.insert("makes", &makes);
            render_template(&tera, "makes/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list makes: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/makes/create")]
pub async fn show_create_make(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "makes");
    context.insert("form", &VehicleMakeForm::default());
    render_template(&tera, "makes/create.html", &context)
}

#[post("/makes/create")]
pub async fn create_make(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<VehicleMakeForm>,
) -> impl Responder {
    let rerender = |form: &VehicleMakeForm, message: String| {
        let mut context = base_context(&flash_messages, "makes");
        context.insert("form", form);
        context.insert("form_error", &message);
        render_template(&tera, "makes/create.html", &context)
    };

    let dto = match form.clone().into_create_dto() {
        Ok(dto) => dto,
        Err(err) => return rerender(&form, format!("Please fill in every field: {err}")),
    };

    match make_service::create_vehicle_make(repo.get_ref(), dto) {
        Ok(make) => {
            FlashMessage::success(format!("Make \"{}\" created.", make.name)).send();
            redirect(&format!("/makes/{}", make.id))
        }
        Err(ServiceError::TypeConstraint(message)) => rerender(&form, message),
        Err(err) => {
            log::error!("Failed to create make: {err}");
            rerender(&form, "Could not save the make.".to_string())
        }
    }
}

#[get("/makes/{make_id}")]
pub async fn show_make(
    make_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match make_service::get_vehicle_make_by_id(repo.get_ref(), make_id.into_inner()) {
        Ok(Some(make)) => {
            let mut context = base_context(&flash_messages, "makes");
            context.insert("make", &make);
            render_template(&tera, "makes/show.html", &context)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load make: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/makes/{make_id}/edit")]
pub async fn show_edit_make(
    make_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match make_service::get_vehicle_make_by_id(repo.get_ref(), make_id.into_inner()) {
        Ok(Some(make)) => {
            let mut context = base_context(&flash_messages, "makes");
            context.insert("make_id", &make.id);
            context.insert("form", &VehicleMakeForm::from(make));
            render_template(&tera, "makes/edit.html", &context)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load make: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/makes/{make_id}/edit")]
pub async fn update_make(
    make_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<VehicleMakeForm>,
) -> impl Responder {
    let make_id = make_id.into_inner();

    let dto = match form.into_update_dto() {
        Ok(dto) => dto,
        Err(err) => {
            FlashMessage::error(format!("Please fill in every field: {err}")).send();
            return redirect(&format!("/makes/{make_id}/edit"));
        }
    };

    if make_service::update_vehicle_make(repo.get_ref(), make_id, dto) {
        FlashMessage::success("Make updated.").send();
        redirect(&format!("/makes/{make_id}"))
    } else {
        FlashMessage::error("Could not update the make.").send();
        redirect("/makes")
    }
}

#[get("/makes/{make_id}/delete")]
pub async fn show_delete_make(
    make_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match make_service::get_vehicle_make_by_id(repo.get_ref(), make_id.into_inner()) {
        Ok(Some(make)) => {
            let mut context = base_context(&flash_messages, "makes");
            context.insert("make", &make);
            render_template(&tera, "makes/delete.html", &context)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load make: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/makes/{make_id}/delete")]
pub async fn delete_make(
    make_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if make_service::delete_vehicle_make(repo.get_ref(), make_id.into_inner()) {
        FlashMessage::success("Make and its models deleted.").send();
    } else {
        FlashMessage::error("Could not delete the make.").send();
    }
    redirect("/makes")
}
