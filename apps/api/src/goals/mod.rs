// Goal CRUD — mechanical storage passthroughs, no generation involved.

pub mod handlers;
