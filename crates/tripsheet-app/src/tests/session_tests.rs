use super::*;

use std::cell::RefCell;
use std::rc::Rc;

struct FakeAuth {
    password: &'static str,
    resets: RefCell<Vec<String>>,
}

impl AuthService for FakeAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        if password == self.password {
            Ok(User {
                uid: "u-1".into(),
                email: email.into(),
            })
        } else {
            Err(AppError::auth("auth/wrong-password"))
        }
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<User, AppError> {
        if password.len() < 6 {
            return Err(AppError::auth("auth/weak-password"));
        }
        Ok(User {
            uid: "u-2".into(),
            email: email.into(),
        })
    }

    fn send_password_reset(&self, email: &str) -> Result<(), AppError> {
        self.resets.borrow_mut().push(email.to_owned());
        Ok(())
    }

    fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn fake_auth() -> FakeAuth {
    FakeAuth {
        password: "secret",
        resets: RefCell::new(Vec::new()),
    }
}

#[test]
fn fresh_install_starts_with_onboarding() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();
    assert_eq!(gate.root_stack(), RootStack::Onboarding);
}

#[test]
fn finishing_onboarding_persists_and_switches_stack() {
    let preferences = Preferences::in_memory();
    let gate = SessionGate::load(preferences.clone()).unwrap();
    gate.finish_onboarding().unwrap();
    assert_eq!(gate.root_stack(), RootStack::Unauthenticated);

    let reloaded = SessionGate::load(preferences).unwrap();
    assert_eq!(reloaded.root_stack(), RootStack::Unauthenticated);
}

#[test]
fn sign_in_and_out_drive_the_stack() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();
    let stacks = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let stacks = Rc::clone(&stacks);
        gate.subscribe(move |stack| stacks.borrow_mut().push(stack))
    };
    let auth = fake_auth();

    let user = gate.sign_in(&auth, "a@b.mr", "secret").unwrap();
    assert_eq!(user.email, "a@b.mr");
    gate.sign_out(&auth).unwrap();

    assert_eq!(
        stacks.borrow().as_slice(),
        &[RootStack::Authenticated, RootStack::Onboarding]
    );
}

#[test]
fn failed_sign_in_keeps_session() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();
    let auth = fake_auth();
    let err = gate.sign_in(&auth, "a@b.mr", "nope").unwrap_err();
    assert_eq!(err.user_message(), "auth/wrong-password");
    assert_eq!(gate.user(), None);
}

#[test]
fn sign_up_signs_the_new_user_in() {
    let preferences = Preferences::in_memory();
    preferences.mark_onboarding_viewed().unwrap();
    let gate = SessionGate::load(preferences).unwrap();
    let auth = fake_auth();

    let err = gate.sign_up(&auth, "new@b.mr", "123").unwrap_err();
    assert_eq!(err.user_message(), "auth/weak-password");
    assert_eq!(gate.root_stack(), RootStack::Unauthenticated);

    let user = gate.sign_up(&auth, "new@b.mr", "123456").unwrap();
    assert_eq!(gate.user(), Some(user));
    assert_eq!(gate.root_stack(), RootStack::Authenticated);
}

#[test]
fn password_reset_requires_an_email() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();
    let auth = fake_auth();

    let err = gate.send_password_reset(&auth, "").unwrap_err();
    assert!(matches!(err, AppError::MissingEmail));
    assert!(auth.resets.borrow().is_empty());

    gate.send_password_reset(&auth, "a@b.mr").unwrap();
    assert_eq!(auth.resets.borrow().as_slice(), &["a@b.mr".to_owned()]);
}
