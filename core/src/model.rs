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

//! Generic data types shared by all persisted concepts.

use uuid::Uuid;

/// Contract of any type that is persisted and addressed by a unique identifier.
pub trait Entity {
    /// Human-readable name of the entity type, used in diagnostics.
    const NAME: &'static str;

    /// Returns the identifier of the entity.
    fn id(&self) -> Uuid;

    /// Replaces the identifier of the entity with `id`.
    fn set_id(&mut self, id: Uuid);
}
