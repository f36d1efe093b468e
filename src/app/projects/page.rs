//! 项目管理前端页面

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Project Management Tool</title>
<style>
  body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    max-width: 900px;
    margin: 30px auto;
    background: #f0f4f8;
    padding: 20px;
  }
  h1 { text-align: center; color: #2c3e50; }
  #add-project-form {
    display: flex;
    gap: 10px;
    margin-bottom: 20px;
    justify-content: center;
  }
  #add-project-form input { flex: 1 1 300px; padding: 10px; font-size: 1rem; }
  #add-project-form button {
    padding: 10px 20px;
    background: #3498db;
    border: none;
    color: white;
    font-weight: bold;
    border-radius: 4px;
    cursor: pointer;
  }
  .project {
    background: white;
    border-radius: 8px;
    box-shadow: 0 0 6px rgba(0,0,0,0.1);
    margin-bottom: 20px;
    padding: 15px;
  }
  .project-header { display: flex; justify-content: space-between; align-items: center; }
  .project-header h2 { margin: 0; color: #34495e; }
  .delete-project {
    cursor: pointer;
    background: #e74c3c;
    border: none;
    color: white;
    padding: 6px 12px;
    border-radius: 5px;
  }
  .task-list { margin-top: 15px; }
  .task { display: flex; align-items: center; padding: 8px 0; border-bottom: 1px solid #eee; }
  .task:last-child { border-bottom: none; }
  .task input[type="checkbox"] { margin-right: 10px; }
  .task-title.completed { text-decoration: line-through; color: gray; }
  .delete-task {
    margin-left: auto;
    cursor: pointer;
    background: #c0392b;
    border: none;
    color: white;
    padding: 4px 8px;
    border-radius: 4px;
  }
  .add-task-form { display: flex; margin-top: 10px; gap: 8px; }
  .add-task-form input { flex: 1; padding: 8px; font-size: 1rem; }
  .add-task-form button {
    padding: 8px 16px;
    background: #2ecc71;
    border: none;
    color: white;
    font-weight: bold;
    border-radius: 5px;
    cursor: pointer;
  }
  #message { text-align: center; color: red; margin-bottom: 10px; min-height: 1.2em; }
</style>
</head>
<body>

<h1>Project Management Tool</h1>

<div id="message"></div>

<form id="add-project-form">
  <input type="text" id="project-name" placeholder="New Project Name" required />
  <button type="submit">Add Project</button>
</form>

<div id="projects"></div>

<script>
  const messageDiv = document.getElementById('message');
  const container = document.getElementById('projects');

  function showMessage(msg, isError = true) {
    messageDiv.textContent = msg;
    messageDiv.style.color = isError ? 'red' : 'green';
    if (msg) setTimeout(() => { messageDiv.textContent = ''; }, 3000);
  }

  function el(tag, className, text) {
    const node = document.createElement(tag);
    if (className) node.className = className;
    if (text !== undefined) node.textContent = text;
    return node;
  }

  function taskUrl(projectId, taskId) {
    return '/api/projects/' + encodeURIComponent(projectId) + '/tasks/' + encodeURIComponent(taskId);
  }

  async function fetchProjects() {
    try {
      const res = await fetch('/api/projects');
      if (!res.ok) throw new Error('Failed to load projects');
      renderProjects(await res.json());
    } catch (e) {
      showMessage(e.message);
    }
  }

  function renderTask(project, task) {
    const row = el('div', 'task');

    const checkbox = document.createElement('input');
    checkbox.type = 'checkbox';
    checkbox.checked = task.completed;
    checkbox.addEventListener('change', e => toggleTaskComplete(project.id, task.id, e.target.checked));

    const title = el('span', 'task-title' + (task.completed ? ' completed' : ''), task.title);

    const del = el('button', 'delete-task', 'Delete');
    del.addEventListener('click', () => deleteTask(project.id, task.id));

    row.append(checkbox, title, del);
    return row;
  }

  function renderProject(project) {
    const card = el('div', 'project');

    const header = el('div', 'project-header');
    const del = el('button', 'delete-project', 'Delete Project');
    del.addEventListener('click', () => deleteProject(project.id));
    header.append(el('h2', null, project.name), del);

    const taskList = el('div', 'task-list');
    project.tasks.forEach(t => taskList.appendChild(renderTask(project, t)));

    const form = el('form', 'add-task-form');
    const input = document.createElement('input');
    input.type = 'text';
    input.placeholder = 'New Task';
    input.required = true;
    form.append(input, el('button', null, 'Add Task'));
    form.addEventListener('submit', e => {
      e.preventDefault();
      addTask(project.id, input.value);
      input.value = '';
    });

    card.append(header, taskList, form);
    return card;
  }

  function renderProjects(projects) {
    container.replaceChildren();
    if (projects.length === 0) {
      container.appendChild(el('p', null, 'No projects yet. Add one above.'));
      return;
    }
    projects.forEach(p => container.appendChild(renderProject(p)));
  }

  async function send(url, method, body, failure) {
    const init = { method };
    if (body !== undefined) {
      init.headers = { 'Content-Type': 'application/json' };
      init.body = JSON.stringify(body);
    }
    const res = await fetch(url, init);
    if (!res.ok) throw new Error(failure);
  }

  async function addProject(name) {
    try {
      await send('/api/projects', 'POST', { name }, 'Failed to add project');
      showMessage('Project added', false);
      fetchProjects();
    } catch (e) {
      showMessage(e.message);
    }
  }

  async function deleteProject(id) {
    if (!confirm('Delete this project?')) return;
    try {
      await send('/api/projects/' + encodeURIComponent(id), 'DELETE', undefined, 'Failed to delete project');
      showMessage('Project deleted', false);
      fetchProjects();
    } catch (e) {
      showMessage(e.message);
    }
  }

  async function addTask(projectId, title) {
    if (!title.trim()) return;
    try {
      await send('/api/projects/' + encodeURIComponent(projectId) + '/tasks', 'POST', { title: title.trim() }, 'Failed to add task');
      showMessage('Task added', false);
      fetchProjects();
    } catch (e) {
      showMessage(e.message);
    }
  }

  async function deleteTask(projectId, taskId) {
    if (!confirm('Delete this task?')) return;
    try {
      await send(taskUrl(projectId, taskId), 'DELETE', undefined, 'Failed to delete task');
      showMessage('Task deleted', false);
      fetchProjects();
    } catch (e) {
      showMessage(e.message);
    }
  }

  async function toggleTaskComplete(projectId, taskId, completed) {
    try {
      await send(taskUrl(projectId, taskId), 'PATCH', { completed }, 'Failed to update task');
      fetchProjects();
    } catch (e) {
      showMessage(e.message);
    }
  }

  document.getElementById('add-project-form').addEventListener('submit', e => {
    e.preventDefault();
    const input = document.getElementById('project-name');
    const name = input.value.trim();
    if (!name) return;
    addProject(name);
    input.value = '';
  });

  fetchProjects();
</script>

</body>
</html>
"##;
