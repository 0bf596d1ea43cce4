//! Role-scoped account operations

use crate::support::{PASSWORD, actor, harness};
use authsvc_application::ports::UserServiceInterface;
use authsvc_domain::entities::UpdateProfileParams;
use authsvc_domain::error::Error;
use authsvc_domain::value_objects::Role;

fn phone_update(user_id: &str, phone: &str) -> UpdateProfileParams {
    UpdateProfileParams {
        user_id: user_id.to_string(),
        phone: phone.to_string(),
        ..UpdateProfileParams::default()
    }
}

#[tokio::test]
async fn student_cannot_update_teacher_profile() {
    let h = harness().build();
    let student = h.register("s@x.com", Role::Student).await;
    let teacher = h.register("t@x.com", Role::Teacher).await;

    let err = h
        .service
        .update_profile(&actor(&student), phone_update(&teacher.id, "+1 555 0100"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::PermissionDenied));
    assert_eq!(h.stored(&teacher.id).await.phone, "");
}

#[tokio::test]
async fn student_updates_own_profile() {
    let h = harness().build();
    let student = h.register("s@x.com", Role::Student).await;

    let updated = h
        .service
        .update_profile(&actor(&student), phone_update(&student.id, "+1 555 0100"))
        .await
        .expect("update");

    assert_eq!(updated.phone, "+1 555 0100");
    assert!(updated.updated_at >= student.updated_at);
}

#[tokio::test]
async fn teacher_scope_covers_self_and_students_only() {
    let h = harness().build();
    let teacher = h.register("t@x.com", Role::Teacher).await;
    let student = h.register("s@x.com", Role::Student).await;
    let colleague = h.register("t2@x.com", Role::Teacher).await;
    let admin = h.register("a@x.com", Role::Admin).await;
    let me = actor(&teacher);

    assert!(h.service.get_user_by_id(&me, &teacher.id).await.is_ok());
    assert!(h.service.get_user_by_id(&me, &student.id).await.is_ok());
    for target in [&colleague, &admin] {
        let result = h.service.get_user_by_id(&me, &target.id).await;
        assert!(matches!(result, Err(Error::PermissionDenied)));
    }
}

#[tokio::test]
async fn admin_reaches_every_account() {
    let h = harness().build();
    let admin = h.register("a@x.com", Role::Admin).await;
    let teacher = h.register("t@x.com", Role::Teacher).await;

    let updated = h
        .service
        .update_profile(&actor(&admin), phone_update(&teacher.id, "+1 555 0199"))
        .await
        .expect("update");
    let verified = h
        .service
        .verify_account(&actor(&admin), &teacher.id)
        .await
        .expect("verify");

    assert_eq!(updated.phone, "+1 555 0199");
    assert!(verified.verified);
}

#[tokio::test]
async fn profile_update_without_changes_is_nothing_to_update() {
    let h = harness().build();
    let student = h.register("s@x.com", Role::Student).await;

    let empty = UpdateProfileParams {
        user_id: student.id.clone(),
        ..UpdateProfileParams::default()
    };
    let same = UpdateProfileParams {
        user_id: student.id.clone(),
        email: student.email.clone(),
        ..UpdateProfileParams::default()
    };

    for params in [empty, same] {
        let result = h.service.update_profile(&actor(&student), params).await;
        assert!(matches!(result, Err(Error::NothingToUpdate)));
    }
}

#[tokio::test]
async fn profile_email_collision_is_email_already_exists() {
    let h = harness().build();
    h.register("taken@x.com", Role::Student).await;
    let student = h.register("s@x.com", Role::Student).await;

    let params = UpdateProfileParams {
        user_id: student.id.clone(),
        email: "taken@x.com".to_string(),
        ..UpdateProfileParams::default()
    };
    let err = h.service.update_profile(&actor(&student), params).await.unwrap_err();

    assert!(matches!(err.root(), Error::EmailAlreadyExists));
}

#[tokio::test]
async fn unknown_target_is_user_not_found() {
    let h = harness().build();
    let admin = h.register("a@x.com", Role::Admin).await;

    let err = h.service.get_user_by_id(&actor(&admin), "missing").await.unwrap_err();

    assert!(matches!(err.root(), Error::UserNotFound));
}

#[tokio::test]
async fn change_password_checks_old_password_against_stored_hash() {
    let h = harness().build();
    let student = h.register("s@x.com", Role::Student).await;
    let me = actor(&student);

    let wrong = h
        .service
        .change_password(&me, &student.id, "not my password", "next password")
        .await;
    assert!(matches!(wrong, Err(Error::InvalidCredentials)));

    h.service
        .change_password(&me, &student.id, PASSWORD, "next password")
        .await
        .expect("change");

    assert!(h.service.login("s@x.com", "next password").await.is_ok());
}

#[tokio::test]
async fn change_password_to_same_value_is_unchanged() {
    let h = harness().build();
    let student = h.register("s@x.com", Role::Student).await;

    let result = h
        .service
        .change_password(&actor(&student), &student.id, PASSWORD, PASSWORD)
        .await;

    assert!(matches!(result, Err(Error::PasswordUnchanged)));
}

#[tokio::test]
async fn student_cannot_change_another_students_password() {
    let h = harness().build();
    let me = h.register("s@x.com", Role::Student).await;
    let other = h.register("o@x.com", Role::Student).await;

    let result = h
        .service
        .change_password(&actor(&me), &other.id, PASSWORD, "next password")
        .await;

    assert!(matches!(result, Err(Error::PermissionDenied)));
}

#[tokio::test]
async fn get_user_by_email_finds_account() {
    let h = harness().build();
    let user = h.register("s@x.com", Role::Student).await;

    let found = h.service.get_user_by_email("s@x.com").await.expect("lookup");

    assert_eq!(found.id, user.id);
}
