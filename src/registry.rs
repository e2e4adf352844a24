//! Student registry - identity allocation, uniqueness and lookup

use crate::error::RegistrationError;
use crate::validation::{is_valid_email, is_valid_name};
use crate::{Student, StudentId, FIRST_STUDENT_ID};
use std::collections::{HashMap, HashSet};

/// Owns every registered student for the lifetime of a session
#[derive(Debug)]
pub struct StudentRegistry {
    students: HashMap<StudentId, Student>,
    /// Ids in registration order
    order: Vec<StudentId>,
    emails: HashSet<String>,
    next_id: u64,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self {
            students: HashMap::new(),
            order: Vec::new(),
            emails: HashSet::new(),
            next_id: FIRST_STUDENT_ID,
        }
    }

    /// Register a student from a raw credentials line:
    /// `<first name> <last name tokens...> <email>`.
    ///
    /// Nothing is stored unless every check passes.
    pub fn register(&mut self, credentials: &str) -> Result<StudentId, RegistrationError> {
        let tokens: Vec<&str> = credentials.split_whitespace().collect();
        self.register_tokens(&tokens)
    }

    /// Register from already split tokens
    pub fn register_tokens(&mut self, tokens: &[&str]) -> Result<StudentId, RegistrationError> {
        if tokens.len() < 3 {
            return Err(RegistrationError::TooFewTokens);
        }
        let (first_name, rest) = (tokens[0], &tokens[1..]);
        let (email, last_names) = (rest[rest.len() - 1], &rest[..rest.len() - 1]);

        if !is_valid_name(first_name) {
            return Err(RegistrationError::InvalidFirstName);
        }
        if !last_names.iter().all(|token| is_valid_name(token)) {
            return Err(RegistrationError::InvalidLastName);
        }
        if !is_valid_email(email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if self.emails.contains(email) {
            return Err(RegistrationError::DuplicateEmail);
        }

        let id = StudentId::new(self.next_id);
        self.next_id += 1;
        let student = Student {
            id,
            first_name: first_name.to_string(),
            last_name: last_names.concat(),
            email: email.to_string(),
        };
        self.emails.insert(student.email.clone());
        self.students.insert(id, student);
        self.order.push(id);
        Ok(id)
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn exists(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// Resolve a raw id token typed by the user. Only the exact spelling of
    /// an id matches, so `010000` or `+10000` are not student 10000.
    pub fn resolve(&self, token: &str) -> Option<&Student> {
        token
            .parse::<StudentId>()
            .ok()
            .filter(|id| id.to_string() == token)
            .and_then(|id| self.find_by_id(id))
    }

    /// Ids in registration order
    pub fn list_ids(&self) -> &[StudentId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
