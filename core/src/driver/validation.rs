// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Contract to gate writes on the validity of their input.

use uuid::Uuid;

/// Decides whether a write against entities of type `E` may proceed.
///
/// A rejected write must never reach the persistence layer.  Validators must be pure: they only
/// look at their arguments.
pub trait Validator<E> {
    /// Returns true if `entity` may be created.
    fn validate_insert(&self, entity: &E) -> bool;

    /// Returns true if `entity` may replace its stored version.
    fn validate_update(&self, entity: &E) -> bool {
        self.validate_insert(entity)
    }

    /// Returns true if the entity identified by `id` may be deleted.
    fn validate_delete(&self, id: Uuid) -> bool {
        !id.is_nil()
    }
}
